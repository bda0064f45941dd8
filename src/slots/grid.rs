// Daily booking window, minutes from midnight. [09:00, 18:00), 15-minute steps.
const OPEN_MINUTES: u32 = 9 * 60;
const CLOSE_MINUTES: u32 = 18 * 60;
const SLOT_MINUTES: u32 = 15;

/// The full ordered slot grid for one day: "HH:MM" labels, zero-padded,
/// strictly increasing. Identical across all doctors and dates.
pub fn generate_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(((CLOSE_MINUTES - OPEN_MINUTES) / SLOT_MINUTES) as usize);
    let mut t = OPEN_MINUTES;
    while t < CLOSE_MINUTES {
        slots.push(format!("{:02}:{:02}", t / 60, t % 60));
        t += SLOT_MINUTES;
    }
    slots
}

pub fn is_slot_label(time: &str) -> bool {
    generate_slots().iter().any(|slot| slot == time)
}
