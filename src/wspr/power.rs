/// Transmit powers a WSPR message may legally carry, in dBm.
///
/// The position in this list doubles as the least significant digit of the
/// packed sensor word, so the order is part of the wire format.
pub const LEGAL_POWERS_DBM: [i32; 19] = [
    0, 3, 7, 10, 13, 17, 20, 23, 27, 30, 33, 37, 40, 43, 47, 50, 53, 57, 60,
];

pub fn power_index(dbm: i32) -> Option<usize> {
    LEGAL_POWERS_DBM.iter().position(|&p| p == dbm)
}
