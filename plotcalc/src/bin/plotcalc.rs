use clap::Parser;
use plotcalc::SweepConfig;

/// Evaluate math expressions, or sample one of `x` over a range.
#[derive(Parser, Debug)]
#[command(name = "plotcalc", version)]
struct Args {
    /// Expression of x to sample
    #[arg(long, value_name = "EXPR")]
    plot: Option<String>,
    /// Start of the sampled range
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    from: f64,
    /// End of the sampled range (excluded)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    to: f64,
    /// Number of samples
    #[arg(long, default_value_t = 20)]
    points: usize,
    /// Expression to evaluate, the REPL starts when empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

mod repl {
    use plotcalc::SweepConfig;

    pub fn evalexpr(input: &str) {
        match plotcalc::compile(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match rpn.eval() {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("{} = {}", rpn, result),
            },
        }
    }

    pub fn plot(expr: &str, cfg: &SweepConfig) -> Result<(), String> {
        const WIDTH: f64 = 50.0;
        let points = cfg.sample(expr).map_err(|e| e.to_string())?;
        let max_abs = points.iter().fold(0.0f64, |m, &(_, y)| m.max(y.abs()));
        println!("y = {}", plotcalc::beautify(expr));
        for (x, y) in points {
            let len = if max_abs > 0.0 { (WIDTH * y.abs() / max_abs) as usize } else { 0 };
            let bar = if y < 0.0 { "-" } else { "\u{2b24}" };
            println!("{:12.4} {:14.6} {}", x, y, bar.repeat(len));
        }
        Ok(())
    }

    // lines mentioning x are plotted over the default range
    pub fn parse_statement(input: &str) {
        if input.contains(['x', 'X']) {
            if let Err(e) = plot(input, &SweepConfig::new(-10.0, 10.0, 20)) {
                println!("{}", e);
            }
        } else {
            evalexpr(input);
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    if let Some(expr) = args.plot {
        return repl::plot(&expr, &SweepConfig::new(args.from, args.to, args.points));
    }
    if !args.expr.is_empty() {
        repl::evalexpr(&args.expr.join(" "));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".plotcalc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                repl::parse_statement(&line);
            }
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
