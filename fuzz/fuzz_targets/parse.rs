use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            let detected = bysquare::detect(data);
            if bysquare::parse(data).is_ok() {
                assert!(detected);
            }
        });
    }
}
