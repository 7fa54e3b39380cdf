//! Configuration for record builders and creators.

/// What to do with a property that has no setter.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownPropertyPolicy {
    /// Fail the build with [`BuildError::UnknownProperty`](crate::BuildError::UnknownProperty).
    #[default]
    Reject,
    /// Leave the record untouched for that key and log it.
    Skip,
}

/// Record construction settings, fixed when a builder is created.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Use the context-taking constructor instead of the plain one.
    pub with_context: bool,
    /// Handling of keys without a setter.
    pub unknown_properties: UnknownPropertyPolicy,
}

impl BuilderConfig {
    /// Select the context-taking (`true`) or plain (`false`) constructor.
    pub fn with_context(mut self, with_context: bool) -> Self {
        self.with_context = with_context;
        self
    }

    /// Set the policy for keys without a setter.
    pub fn unknown_properties(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.unknown_properties = policy;
        self
    }
}
