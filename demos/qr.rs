use qrcode::QrCode;

use std::io::Write;

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(iban), Some(amount)) = (args.next(), args.next()) else {
        eprintln!("usage: qr <IBAN> <AMOUNT> [VARIABLE_SYMBOL]");
        std::process::exit(2);
    };
    let model = bysquare::Model {
        iban: Some(iban),
        amount: Some(amount.parse().unwrap()),
        currency_code: Some("EUR".into()),
        variable_symbol: args.next(),
        payments: Some(1),
        payment_options: Some(1),
        bank_accounts: Some(1),
        ..bysquare::Model::default()
    };
    let payload = bysquare::generate(&model).unwrap();
    let code = QrCode::new(&payload).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n").as_bytes()).unwrap();
    stdout.write_all(format!("{payload}\n").as_bytes()).unwrap();
    stdout.flush().unwrap();
}
