use serde::Serialize;

/// Body returned by `GET /tshirt`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tshirt {
    pub tshirt: &'static str,
    pub size: &'static str,
}

impl Tshirt {
    pub const FIXED: Tshirt = Tshirt {
        tshirt: "wow",
        size: "large",
    };
}

#[cfg(test)]
mod tests {
    use super::Tshirt;

    #[test]
    fn serializes_to_the_fixed_document() {
        let body = serde_json::to_string(&Tshirt::FIXED).unwrap();
        assert_eq!(body, r#"{"tshirt":"wow","size":"large"}"#);
    }

    #[test]
    fn fixed_value_never_changes() {
        assert_eq!(Tshirt::FIXED, Tshirt { tshirt: "wow", size: "large" });
    }
}
