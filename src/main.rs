use std::path::PathBuf;

use clap::Parser;
use formant_vowel::{FORMANT_COUNT, Formant, VowelParms, synthesize_vowel, wav};
use log::{error, info, warn};

/// Synthesizes a vowel from four formants and writes it as a WAV file.
#[derive(Parser, Debug)]
#[command(name = "vowel", about, long_about = None)]
struct Args {
    /// Length of the vowel, in samples
    #[arg(long, value_name = "SAMPLES", default_value_t = 16000)]
    duration: usize,

    /// Pitch frequency in Hz
    #[arg(long, value_name = "HZ", default_value_t = 120.0)]
    f0: f64,

    /// Formant frequencies F1 to F4 in Hz, comma separated
    #[arg(
        long,
        value_name = "HZ,HZ,HZ,HZ",
        value_delimiter = ',',
        default_values_t = [520.0, 1006.0, 2831.0, 3168.0]
    )]
    formants: Vec<f64>,

    /// Formant bandwidths BW1 to BW4, comma separated
    #[arg(
        long,
        value_name = "BW,BW,BW,BW",
        value_delimiter = ',',
        default_values_t = [0.25, 0.3, 0.4, 0.5]
    )]
    bandwidths: Vec<f64>,

    /// Sample rate in Hz
    #[arg(long, value_name = "HZ", default_value_t = 16000)]
    sample_rate: u32,

    /// RMS level the vowel is scaled to before it is written
    #[arg(long, default_value_t = 0.18)]
    rms: f64,

    /// Output WAV file
    #[arg(short, long, default_value = "vowel.wav")]
    output: PathBuf,

    /// More output per occurrence (debug, then trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn vowel_parms(&self) -> Result<VowelParms, String> {
        if self.formants.len() != FORMANT_COUNT || self.bandwidths.len() != FORMANT_COUNT {
            return Err(format!(
                "expected {FORMANT_COUNT} formants and {FORMANT_COUNT} bandwidths, got {} and {}",
                self.formants.len(),
                self.bandwidths.len()
            ));
        }
        let mut formants = [Formant::new(0.0, 0.0); FORMANT_COUNT];
        for (formant, (&freq, &bw)) in formants
            .iter_mut()
            .zip(self.formants.iter().zip(&self.bandwidths))
        {
            *formant = Formant::new(freq, bw);
        }
        Ok(VowelParms {
            duration: self.duration,
            f0: self.f0,
            formants,
            sample_rate: f64::from(self.sample_rate),
        })
    }

    fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let parms = args.vowel_parms()?;
    let mut vowel = synthesize_vowel(&parms)?;
    if vowel.iter().any(|sample| !sample.is_finite()) {
        warn!("the vowel contains non-finite samples, the bandwidths are likely too large");
    }
    wav::adjust_signal_gain(&mut vowel, args.rms);
    wav::create_wav(&args.output, &vowel, args.sample_rate)?;
    info!(
        "wrote {} samples at {} Hz to {}",
        vowel.len(),
        args.sample_rate,
        args.output.display()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = simple_logger::init_with_level(args.log_level()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}
