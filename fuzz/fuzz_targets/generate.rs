use honggfuzz::fuzz;

use bysquare::Model;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            if text.contains('\t') || text.len() > 30_000 {
                return;
            }
            let model = Model {
                payment_note: Some(text.to_owned()),
                amount: Some(f64::from(data.len() as u32) / 100.0),
                payments: Some(1),
                ..Model::default()
            };
            let encoded = bysquare::generate(&model).unwrap();
            assert!(bysquare::detect(&encoded));
            assert_eq!(bysquare::parse(&encoded).unwrap(), model);
        });
    }
}
