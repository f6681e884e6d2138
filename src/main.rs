use obrik::cli::args;
use obrik::io::TerminalIO;
use obrik::Inspector;

fn main() {
    env_logger::init();

    let args = match args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", args::USAGE);
            std::process::exit(1);
        }
    };

    if args.help {
        println!("{}", args::USAGE);
        return;
    }

    let mut input = TerminalIO;
    let mut output = TerminalIO;
    if let Err(e) = Inspector::new(&mut input, &mut output).run(args.source()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
