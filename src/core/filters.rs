use crate::models::Person;

/// Check whether a candidate may be offered to the seeker at all
///
/// The seeker is never their own match, and a candidate with no open
/// mentoring slot is dropped before scoring.
#[inline]
pub fn is_eligible(candidate: &Person, seeker: &Person) -> bool {
    if candidate.id == seeker.id {
        return false;
    }

    candidate.capacity > candidate.current_mentees
}
