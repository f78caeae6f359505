use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rrb-server",
    author = "RRB Server Team",
    version,
    about = "HTTP interface to the RasPiRobot Board V3",
    long_about = "Exposes the RasPiRobot Board V3 (motors, LEDs, switches, sonar) over an \
                  HTTP/JSON API, with a browser control UI and a Scratch extension"
)]
pub struct Cli {
    /// Port to bind the web server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host to bind the web server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Write JSON logs to a daily-rotated file instead of the console
    #[arg(long)]
    pub log_to_file: bool,
}
