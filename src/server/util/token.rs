/// Generates a random 32-byte token encoded as 64 lowercase hex characters.
pub fn random_token() -> String {
    let bytes: [u8; 32] = rand::random();

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
