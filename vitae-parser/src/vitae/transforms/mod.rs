//! Transform pipeline infrastructure
//!
//! Loading a vitae document is a short chain of stages: raw text goes through the
//! compatibility shim, is parsed as YAML into a [`Document`](crate::vitae::Document), and is
//! optionally validated against its declared section order. Each stage is a [`Runnable`];
//! [`Transform`] composes them with `.then()` and the compiler checks that each stage's
//! output type matches the next stage's input type:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(QuoteBoldListItems::new())   // String -> String
//!     .then(ParseYaml::new())            // String -> Document
//!     .then(ValidateOrder::new());       // Document -> Validated
//! ```
//!
//! Common pipelines are pre-built as `once_cell::sync::Lazy` statics in [`standard`], and
//! [`DocumentLoader`](crate::vitae::loader::DocumentLoader) exposes them as shortcuts.
//!
//! - [`stages`]: individual stages (shim, YAML parsing, order validation)
//! - [`standard`]: pre-built combinations

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl TransformError {
    pub fn stage(stage: impl Into<String>, message: impl ToString) -> Self {
        TransformError::StageFailed {
            stage: stage.into(),
            message: message.to_string(),
        }
    }
}

/// Anything that can transform an input to an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built (static) transform after this one.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input * 2)
        }
    }

    struct AddTen;
    impl Runnable<i32, i32> for AddTen {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input + 10)
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn run(&self, input: i32) -> Result<String, TransformError> {
            Ok(input.to_string())
        }
    }

    struct FailingStage;
    impl Runnable<i32, i32> for FailingStage {
        fn run(&self, _input: i32) -> Result<i32, TransformError> {
            Err(TransformError::stage("failing", "intentional failure"))
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|x: i32| Ok(x * 2));
        assert_eq!(transform.run(5).unwrap(), 10);
    }

    #[test]
    fn test_chained_stages() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(AddTen)
            .then(IntToString);

        assert_eq!(transform.run(5).unwrap(), "20");
    }

    #[test]
    fn test_error_short_circuits() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(FailingStage)
            .then(AddTen);

        assert_eq!(
            transform.run(5).unwrap_err(),
            TransformError::stage("failing", "intentional failure")
        );
    }

    #[test]
    fn test_then_transform_with_static() {
        static DOUBLE: once_cell::sync::Lazy<Transform<i32, i32>> =
            once_cell::sync::Lazy::new(|| Transform::from_fn(Ok).then(DoubleNumber));

        let transform = Transform::from_fn(|x: i32| Ok(x + 1)).then_transform(&DOUBLE);
        assert_eq!(transform.run(4).unwrap(), 10);
    }

    #[test]
    fn test_error_display() {
        let stage_err = TransformError::stage("yaml", "bad indentation");
        assert_eq!(stage_err.to_string(), "Stage 'yaml' failed: bad indentation");
    }
}
