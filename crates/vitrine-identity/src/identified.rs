use crate::normalize::{initials, normalize};

/**
    Helper trait for anything that carries a raw, backend-supplied identity.

    Implementors only need to expose the raw name and email,
    both of which may be missing, and get a presentable
    display name and avatar initials for free.
*/
pub trait Identified {
    fn raw_name(&self) -> Option<String>;

    fn raw_email(&self) -> Option<String>;

    /**
        Normalizes the raw identity into a display name.

        See [`normalize`] for more information.
    */
    fn display_name(&self) -> String {
        let name = self.raw_name();
        let email = self.raw_email();
        normalize(name.as_deref(), email.as_deref())
    }

    fn initials(&self) -> String {
        initials(&self.display_name())
    }
}

impl Identified for (Option<String>, Option<String>) {
    fn raw_name(&self) -> Option<String> {
        self.0.clone()
    }

    fn raw_email(&self) -> Option<String> {
        self.1.clone()
    }
}

impl Identified for (Option<&str>, Option<&str>) {
    fn raw_name(&self) -> Option<String> {
        self.0.map(ToString::to_string)
    }

    fn raw_email(&self) -> Option<String> {
        self.1.map(ToString::to_string)
    }
}
