use crate::error::CoreError;
use std::fmt;
use std::marker::PhantomData;

/// Validation hook for a [`Field`].
pub trait FieldRule {
    type Value: Clone + fmt::Display;

    fn validate(value: &Self::Value) -> Result<(), CoreError>;
}

/// A value that always satisfies its rule `R`.
///
/// The rule runs on construction and on every [`Field::set`]; a rejected
/// candidate never replaces the stored value.
pub struct Field<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    pub fn new(value: impl Into<R::Value>) -> Result<Self, CoreError> {
        let value = value.into();
        R::validate(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    pub fn set(&mut self, value: impl Into<R::Value>) -> Result<(), CoreError> {
        let candidate = value.into();
        R::validate(&candidate)?;
        self.value = candidate;
        Ok(())
    }

    pub fn value(&self) -> &R::Value {
        &self.value
    }

    pub fn into_inner(self) -> R::Value {
        self.value
    }
}

impl<R: FieldRule> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for Field<R>
where
    R::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value).finish()
    }
}

impl<R: FieldRule> PartialEq for Field<R>
where
    R::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for Field<R> where R::Value: Eq {}

impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
