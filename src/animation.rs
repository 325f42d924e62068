use crate::phase::Phase;

/// An ordered, immutable sequence of phases.
#[derive(Clone, Debug, Default)]
pub struct PlayableAnimation {
    phases: Vec<Phase>,
}

impl PlayableAnimation {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}

impl FromIterator<Phase> for PlayableAnimation {
    fn from_iter<I: IntoIterator<Item = Phase>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
