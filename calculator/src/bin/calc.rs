use calculator::{Calculator, ExpressionError, Separators};
use std::str::FromStr;

// CALC_LOCALE wins over the OS locale
fn separators() -> Separators {
    let tag = std::env::var("CALC_LOCALE").ok().or_else(sys_locale::get_locale);
    match tag {
        Some(tag) => {
            let separators = Separators::from_locale_tag(&tag);
            log::info!("locale {} uses separators {:?}", tag, separators);
            separators
        }
        None => Separators::default(),
    }
}

fn init_logging() -> Result<(), String> {
    let level = match std::env::var("CALC_LOG") {
        Ok(level) => log::Level::from_str(&level).map_err(|e| format!("CALC_LOG: {}", e))?,
        Err(_) => log::Level::Warn,
    };
    simple_logger::init_with_level(level).map_err(|e| e.to_string())
}

fn report(e: &ExpressionError) -> String {
    match e.offset() {
        Some(pos) => format!("Error: {} (at position {})", e, pos),
        None => format!("Error: {}", e),
    }
}

fn evalexpr(calc: &Calculator, input: &str) -> Result<String, ExpressionError> {
    let rpn = calc.parse(input)?;
    let result = calculator::evaluate_rpn(&rpn)?;
    Ok(format!("{} = {}", rpn, result))
}

fn main() -> Result<(), String> {
    init_logging()?;
    let calc = Calculator::with_separators(separators());

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match evalexpr(&calc, &input) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("{}", report(&e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let history = dirs::home_dir().map(|home| home.join(".calc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }
    loop {
        match rl.readline("calc> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match evalexpr(&calc, &line) {
                    Ok(out) => println!("{}", out),
                    Err(e) => println!("{}", report(&e)),
                }
            }
        }
    }
    if let Some(ref path) = history {
        if let Err(e) = rl.save_history(path) {
            log::warn!("couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}
