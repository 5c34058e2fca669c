use rand::Rng;
use std::error::Error;
use std::io;
use subnet_quiz::config::QuizConfig;
use subnet_quiz::generate_problem;
use subnet_quiz::processing::{DrillDirection, OctetDrill};
use subnet_quiz::session::Session;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("log4rs.yml not loaded, logging disabled: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = QuizConfig::from_env();
    let mut rng = config.rng();
    let mut session = Session::new(&config, io::stdin().lock(), io::stdout());

    let drill = std::env::args().nth(1).as_deref() == Some("drill");
    loop {
        let finished = if drill {
            let direction = if rng.gen() {
                DrillDirection::DecimalToBinary
            } else {
                DrillDirection::BinaryToDecimal
            };
            session.run_drill(OctetDrill::random(&mut rng, direction))?
        } else {
            let problem = generate_problem(config.mode, &mut rng)?;
            session.run_round(&problem)?
        };
        if !finished || !session.play_again()? {
            break;
        }
    }

    log::info!("#End main()");
    Ok(())
}
