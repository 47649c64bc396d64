use std::io;

use convert_stage::action::cli::process_args;

fn main() -> io::Result<()> {
    let converter = process_args()?;
    log::info!("程式執行完成，轉換器：{}", converter);
    Ok(())
}
