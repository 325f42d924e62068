use std::{fmt, rc::Rc};

/// A caller-supplied visual mutation driven by normalized progress in `[0, 1]`.
///
/// The core never inspects what a transition does. It may be invoked many
/// times with non-monotonic progress while scrubbing.
#[derive(Clone)]
pub struct Transition(Rc<dyn Fn(f64)>);

impl Transition {
    pub fn new(f: impl Fn(f64) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn apply(&self, progress: f64) {
        (self.0)(progress)
    }

    /// A transition with no visual effect.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<F> From<F> for Transition
where
    F: Fn(f64) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transition")
    }
}
