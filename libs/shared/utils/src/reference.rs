use rand::Rng;

const REFERENCE_LENGTH: usize = 10;
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short display code attached to each consultation. Not collision-resistant;
/// the row id stays the real key.
pub fn generate_booking_reference() -> String {
    let mut rng = rand::thread_rng();
    (0..REFERENCE_LENGTH)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect()
}
