use crate::error::BatchError;

/// A flag the builder derives and injects itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedFlag {
    /// Token searched for in the user's flags (may carry a trailing space)
    pub token: String,
    /// Setting this flag's value is derived from, if any
    pub derived_from: Option<String>,
}

impl ReservedFlag {
    /// A flag whose value comes from another setting
    pub fn derived(token: impl Into<String>, setting: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            derived_from: Some(setting.into()),
        }
    }

    /// A flag whose value the builder supplies directly
    pub fn supplied(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            derived_from: None,
        }
    }

    fn hint(&self) -> String {
        match &self.derived_from {
            Some(setting) => format!("This value is derived from property: {}", setting),
            None => "This value is supplied by the batch builder.".to_string(),
        }
    }
}

/// Check that no reserved token appears anywhere in the joined `extra_flags`.
///
/// # Arguments
/// * `extra_flags` - User-supplied flags, joined with single spaces before matching
/// * `reserved` - Tokens to look for, reported in the order given
/// * `config_key` - Setting that supplied `extra_flags`, named in the error
pub fn validate_no_reserved_flags<S: AsRef<str>>(
    extra_flags: &[S],
    reserved: &[ReservedFlag],
    config_key: &str,
) -> Result<(), BatchError> {
    let all_params = extra_flags
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    match reserved.iter().find(|r| all_params.contains(r.token.as_str())) {
        Some(hit) => Err(BatchError::Collision {
            flag: hit.token.trim_end().to_string(),
            config_key: config_key.to_string(),
            source_hint: hit.hint(),
        }),
        None => Ok(()),
    }
}
