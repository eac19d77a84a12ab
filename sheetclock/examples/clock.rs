//! Resolve the spreadsheet connection and walk through one shift.
//!
//! ```shell
//! SHEETCLOCK_SECRETS_FILE=./secrets.toml cargo run --example clock -- ㄱㅁ
//! ```

use anyhow::Result;
use sheetclock::attendance::ClockState;
use sheetclock::google::Config;
use sheetclock::hangul;
use sheetclock::time::now_at;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = sheetclock::default_context();
    let conn = match sheetclock::connect(&ctx, &Config::from_env(&ctx)).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("{}", e.to_user_message());
            std::process::exit(1);
        }
    };
    println!(
        "spreadsheet {} as {}",
        conn.sheets.spreadsheet.id(),
        conn.credential.client_email()
    );

    let names = ["김민수", "김영희", "이민호", "박서준"];
    let query = std::env::args().nth(1).unwrap_or_default();
    let Some(employee) = hangul::filter(&names, &query).first().copied() else {
        println!("nobody matches '{query}'");
        return Ok(());
    };

    let (state, clock_in) =
        ClockState::Idle.clock_in(employee, "office", now_at(conn.sheets.utc_offset))?;
    println!("{} <- {:?}", conn.sheets.worksheets.attendance, clock_in.row());

    let (_, record) = state.clock_out(now_at(conn.sheets.utc_offset))?;
    println!("{} <- {:?}", conn.sheets.worksheets.attendance, record.row());
    Ok(())
}
