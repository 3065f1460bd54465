use alloc::borrow::Cow;

/// Discriminator configuration of a polymorphic type.
///
/// A type carrying `ParentOptions` can be used as the parent of a
/// [`Registration`](crate::inherit::Registration). When data is deserialized
/// as this type, the value found at [`discriminator_field`] selects which
/// registered child is instantiated.
///
/// With [`allow_self`], the type itself is a legal result when the field is
/// missing or its value matches no child.
///
/// A type without `ParentOptions` is not polymorphic and always resolves to
/// itself.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::ParentOptions;
///
/// let options = ParentOptions::new("type").with_allow_self(true);
/// assert_eq!(options.discriminator_field(), "type");
/// assert!(options.allow_self());
/// ```
///
/// [`discriminator_field`]: ParentOptions::discriminator_field
/// [`allow_self`]: ParentOptions::allow_self
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOptions {
    discriminator_field: Cow<'static, str>,
    allow_self: bool,
}

impl ParentOptions {
    /// Creates options reading the given field, without self-allowance.
    #[inline]
    pub fn new(discriminator_field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            discriminator_field: discriminator_field.into(),
            allow_self: false,
        }
    }

    /// Sets whether the parent itself is a legal resolution result.
    #[inline]
    pub fn with_allow_self(mut self, allow_self: bool) -> Self {
        self.allow_self = allow_self;
        self
    }

    /// Returns the name of the data field holding the discriminator value.
    #[inline]
    pub fn discriminator_field(&self) -> &str {
        &self.discriminator_field
    }

    /// Returns `true` if the parent may resolve to itself.
    #[inline]
    pub const fn allow_self(&self) -> bool {
        self.allow_self
    }
}
