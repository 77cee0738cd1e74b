use honggfuzz::fuzz;

use bysquare::alphanumeric::{decode, encode};

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(decoded) = decode(data) {
                let reencoded = encode(&decoded);
                assert!(data.starts_with(&reencoded[..reencoded.len().saturating_sub(1)]));
            }
        });
    }
}
