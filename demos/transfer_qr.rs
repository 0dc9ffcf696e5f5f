use vietqr_sdk::{
    error::VietQrResult,
    time::generate_order_number,
    vietqr::{VietQr, VietQrConfigBuilder},
};

const BANK_BIN: &str = "963388"; // Timo
const ACCOUNT_NUMBER: &str = "0857700655";
const ACCOUNT_NAME: &str = "THAI THI MINH PHUONG";

fn main() -> VietQrResult<()> {
    env_logger::init();

    let config = VietQrConfigBuilder::new(BANK_BIN, ACCOUNT_NUMBER)
        .with_account_name(ACCOUNT_NAME)
        .build();
    let qr = VietQr::new(config);

    let order_no = generate_order_number()?;
    let info = qr.transfer_info(&order_no, 60000)?;

    println!("account:  {}", info.account_number);
    println!("name:     {}", info.account_name);
    println!("amount:   {} VND", info.amount);
    println!("content:  {}", info.content);
    println!("payload:  {}", info.payload);

    Ok(())
}
