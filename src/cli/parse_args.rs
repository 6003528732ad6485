use stoat_sat::config::Config;

/// Parse CLI arguments into a [Config] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &mut [String], cfg: &mut Config) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            // The cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--forget") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<f64>() {
                        if (0.0..=1.0).contains(&value) {
                            println!("c forget set to: {value}");
                            cfg.forgetfulness = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("forget requires a value between 0 and 1");
                std::process::exit(1);
            }

            Some("--random") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<f64>() {
                        if (0.0..=1.0).contains(&value) {
                            println!("c random set to: {value}");
                            cfg.randomness = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("random requires a value between 0 and 1");
                std::process::exit(1);
            }

            Some("--restart_base") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if value > 0 {
                            println!("c restart_base set to: {value}");
                            cfg.restart_base = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("restart_base requires a positive value");
                std::process::exit(1);
            }

            Some("--restart_factor") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<f64>() {
                        if value >= 1.0 {
                            println!("c restart_factor set to: {value}");
                            cfg.restart_factor = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("restart_factor requires a value of at least 1");
                std::process::exit(1);
            }

            Some("--seed") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        println!("c seed set to: {value}");
                        cfg.seed = value;
                        continue 'arg_examination;
                    }
                }

                println!("seed requires an unsigned integer value");
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
