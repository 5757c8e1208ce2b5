use crate::models::Person;

/// Calculate spare mentoring room as a fraction of capacity (0-1)
///
/// Zero capacity and at/over-capacity candidates both score 0.
#[inline]
pub fn calculate_load_score(candidate: &Person) -> f64 {
    if candidate.capacity == 0 {
        return 0.0;
    }

    let available_slots = candidate.available_slots();
    if available_slots == 0 {
        return 0.0;
    }

    f64::from(available_slots) / f64::from(candidate.capacity)
}
