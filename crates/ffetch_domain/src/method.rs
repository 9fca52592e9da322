use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Request method. Parsing ignores ASCII case; anything that is not one of
/// the supported verbs is kept upper-cased in [`Method::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Head,
    Put,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Other(other) => other,
        }
    }
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        let value = value.to_ascii_uppercase();
        match value.as_str() {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "PUT" => Method::Put,
            _ => Method::Other(value),
        }
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for Method {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_method_parse_ignores_case() {
        assert_eq!(Method::from("get"), Method::Get);
        assert_eq!(Method::from("Head"), Method::Head);
        assert_eq!(Method::from("PUT"), Method::Put);
    }

    #[test]
    fn test_method_unknown_is_upper_cased() {
        let actual = Method::from("delete");
        assert_eq!(actual, Method::Other("DELETE".to_string()));
        assert_eq!(actual.to_string(), "DELETE");
    }

    #[test]
    fn test_method_from_str_matches_from() {
        let actual: Method = "pUt".parse().unwrap();
        assert_eq!(actual, Method::Put);

        let actual: Method = "patch".parse().unwrap();
        assert_eq!(actual, Method::Other("PATCH".to_string()));
    }

    #[test]
    fn test_method_into_from_owned_string() {
        let actual: Method = String::from("head").into();
        assert_eq!(actual, Method::Head);
    }

    #[test]
    fn test_method_default_is_get() {
        assert_eq!(Method::default(), Method::Get);
    }
}
