use std::ops::Deref;

/// A float which is neither NaN nor infinite, and therefore totally ordered.
///
/// Negative zero is stored as positive zero, so both compare and count as the same value.
#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Debug)]
pub struct FiniteF64(f64);
impl FiniteF64 {
    pub fn new_checked(f: f64) -> Option<Self> {
        f.is_finite().then(|| Self::new(f))
    }
    pub(crate) fn new(f: f64) -> Self {
        debug_assert!(f.is_finite());
        if f == 0. {
            Self(0.)
        } else {
            Self(f)
        }
    }

    pub fn inner(&self) -> f64 {
        self.0
    }

    fn compare_internal(&self, other: &FiniteF64) -> std::cmp::Ordering {
        if self.0 < other.0 {
            std::cmp::Ordering::Less
        } else if self.0 == other.0 {
            std::cmp::Ordering::Equal
        } else {
            std::cmp::Ordering::Greater
        }
    }
}
impl Deref for FiniteF64 {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Eq for FiniteF64 {}
impl PartialOrd<FiniteF64> for FiniteF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.compare_internal(other))
    }
}
impl Ord for FiniteF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.compare_internal(other)
    }
}
impl TryFrom<f64> for FiniteF64 {
    type Error = ();

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        FiniteF64::new_checked(f).ok_or(())
    }
}

#[test]
fn rejects_non_finite() {
    assert!(FiniteF64::new_checked(f64::NAN).is_none());
    assert!(FiniteF64::new_checked(f64::INFINITY).is_none());
    assert!(FiniteF64::try_from(f64::NEG_INFINITY).is_err());
    assert_eq!(FiniteF64::new_checked(2.5).map(|f| f.inner()), Some(2.5));
}
#[test]
fn negative_zero_equals_zero() {
    let a = FiniteF64::new(-0.);
    let b = FiniteF64::new(0.);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert!(a.inner().is_sign_positive());
}
#[test]
fn ordering() {
    let mut v: Vec<FiniteF64> = [3., -1., 2.]
        .into_iter()
        .map(FiniteF64::new)
        .collect();
    v.sort();
    assert_eq!(v.iter().map(|f| **f).collect::<Vec<_>>(), vec![-1., 2., 3.]);
}
