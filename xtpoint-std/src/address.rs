//! Dotted-path addressing: `"<point>.<method>[#id]"`.
//!
//! The point name may itself contain dots; the method is always the final
//! segment. The method segment may be a comma-separated list (for batch
//! invocation) and may carry a `#id` suffix (for id-scoped exec).

use std::{fmt, str::FromStr};
use xtpoint_core::AddressError;

/// A parsed dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    point: String,
    methods: Vec<String>,
    id: Option<String>,
}

impl Address {
    /// Parse a path such as `"canada.order.exec#two"`.
    pub fn parse(path: &str) -> Result<Self, AddressError> {
        if path.is_empty() {
            return Err(AddressError::Empty);
        }
        // Ids are opaque and may contain dots, so split them off first.
        let (body, id) = match path.split_once('#') {
            Some((_, "")) => return Err(AddressError::EmptyId(path.to_owned())),
            Some((body, id)) => (body, Some(id.to_owned())),
            None => (path, None),
        };
        let Some((point, list)) = body.rsplit_once('.') else {
            return Err(AddressError::MissingMethod(path.to_owned()));
        };
        if point.is_empty() {
            return Err(AddressError::MissingPoint(path.to_owned()));
        }
        if list.is_empty() {
            return Err(AddressError::MissingMethod(path.to_owned()));
        }

        let methods: Vec<String> = list.split(',').map(str::to_owned).collect();
        if methods.iter().any(String::is_empty) {
            return Err(AddressError::EmptyMethodName(path.to_owned()));
        }
        if methods.iter().any(|m| m.contains(char::is_whitespace)) {
            return Err(AddressError::InvalidMethodName(path.to_owned()));
        }

        Ok(Self {
            point: point.to_owned(),
            methods,
            id,
        })
    }

    /// The point name.
    pub fn point(&self) -> &str {
        &self.point
    }

    /// All method names, in list order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The `#id` suffix, if present.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The only method name; fails for comma-separated lists.
    pub fn method(&self) -> Result<&str, AddressError> {
        match self.methods.as_slice() {
            [single] => Ok(single),
            _ => Err(AddressError::UnexpectedList(self.to_string())),
        }
    }

    /// Reject an `#id` suffix for forms that do not accept one.
    pub fn without_id(self) -> Result<Self, AddressError> {
        match self.id {
            Some(_) => Err(AddressError::UnexpectedId(self.to_string())),
            None => Ok(self),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.point, self.methods.join(","))?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_may_contain_dots() {
        let addr = Address::parse("canada.hockey.slapshot").unwrap();
        assert_eq!(addr.point(), "canada.hockey");
        assert_eq!(addr.method().unwrap(), "slapshot");
        assert_eq!(addr.id(), None);
    }

    #[test]
    fn id_suffix() {
        let addr: Address = "canada.order.exec#two".parse().unwrap();
        assert_eq!(addr.point(), "canada.order");
        assert_eq!(addr.method().unwrap(), "exec");
        assert_eq!(addr.id(), Some("two"));
        assert_eq!(addr.to_string(), "canada.order.exec#two");
        assert!(matches!(
            addr.without_id(),
            Err(AddressError::UnexpectedId(_))
        ));

        let dotted = Address::parse("ui.toolbar.render#com.acme.button").unwrap();
        assert_eq!(dotted.point(), "ui.toolbar");
        assert_eq!(dotted.id(), Some("com.acme.button"));
    }

    #[test]
    fn method_list() {
        let addr = Address::parse("canada.multi.first,second").unwrap();
        assert_eq!(addr.methods(), ["first", "second"]);
        assert_eq!(
            addr.method(),
            Err(AddressError::UnexpectedList("canada.multi.first,second".into()))
        );
    }

    #[test]
    fn malformed_paths() {
        assert_eq!(Address::parse(""), Err(AddressError::Empty));
        assert_eq!(
            Address::parse("nodots"),
            Err(AddressError::MissingMethod("nodots".into()))
        );
        assert_eq!(
            Address::parse("point."),
            Err(AddressError::MissingMethod("point.".into()))
        );
        assert_eq!(
            Address::parse(".method"),
            Err(AddressError::MissingPoint(".method".into()))
        );
        assert_eq!(
            Address::parse("point.method#"),
            Err(AddressError::EmptyId("point.method#".into()))
        );
        assert_eq!(
            Address::parse("point.a,,b"),
            Err(AddressError::EmptyMethodName("point.a,,b".into()))
        );
        assert_eq!(
            Address::parse("p. m"),
            Err(AddressError::InvalidMethodName("p. m".into()))
        );
        assert_eq!(
            Address::parse("p.first, second"),
            Err(AddressError::InvalidMethodName("p.first, second".into()))
        );
    }
}
