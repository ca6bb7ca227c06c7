use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps passwords and card data so `{:?}` and `{}` in log macros print a mask.
/// Serialization still emits the real value.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Masked<String> {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Last four non-space characters, e.g. for "card ending in 3456"
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self.0.chars().filter(|c| !c.is_whitespace()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_masked() {
        let secret = Masked::from("hunter22");
        assert_eq!(format!("{:?}", secret), "********");
        assert_eq!(format!("{}", secret), "********");
        assert_eq!(secret.expose(), "hunter22");
    }

    #[test]
    fn test_serialize_keeps_value() {
        let secret = Masked::from("4111");
        assert_eq!(serde_json::to_string(&secret).unwrap(), r#""4111""#);
    }

    #[test]
    fn test_last_four() {
        assert_eq!(Masked::from("1234 5678 9012 3456").last_four(), "3456");
        assert_eq!(Masked::from("12").last_four(), "12");
        assert!(Masked::from("   ").is_blank());
    }
}
