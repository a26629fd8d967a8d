mod repl {
    use calculator::{CalcError, Expression};
    use tracing::debug;

    // "sqrt <x>" or "<number> <op> <number>"
    pub fn eval_line(line: &str) -> Result<String, CalcError> {
        let line = line.trim();
        if let Some(arg) = line.strip_prefix("sqrt") {
            let x = arg
                .trim()
                .parse::<f64>()
                .map_err(|e| CalcError::ParseError(format!("bad operand '{}': {}", arg.trim(), e)))?;
            return Ok(format!("sqrt {} = {}", x, calculator::sqrt(x)?));
        }
        let expr: Expression = line.parse()?;
        debug!(%expr, "evaluating");
        Ok(format!("{} = {}", expr, expr.eval()?))
    }

    pub fn print_line(line: &str) -> bool {
        match eval_line(line) {
            Ok(out) => {
                println!("{}", out);
                true
            }
            Err(e) => {
                println!("error: {}", e);
                false
            }
        }
    }

}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_tracing();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        if !repl::print_line(&input) {
            std::process::exit(1);
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => (),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                repl::print_line(&line);
            }
        }
    }
}
