use std::io;

use anyhow::{ensure, Result};
use clap::{Parser, arg, command};
use log::LevelFilter;
use mat2x2::{FormatConfig, Mat22};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Digits printed after the decimal point
    #[arg(short, long, default_value_t=2)]
    precision: usize,
    /// Only print the final result
    #[arg(short, long, default_value_t=false)]
    quiet: bool,
    /// Read an extra matrix from stdin and check it is (10, 20, 30, 40)
    #[arg(short, long, default_value_t=false)]
    interactive: bool,
}

struct Printer {
    config: FormatConfig,
    quiet: bool,
}

impl Printer {
    fn show(&self, name: &str, m: &Mat22) {
        if !self.quiet {
            println!("{name}\n{}", m.display_with(self.config));
        }
    }

    fn line(&self, text: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", text.as_ref());
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MAT22_LOG", "warn"))
        .init();

    let args = Args::parse();
    let out = Printer {
        config: FormatConfig::new().with_precision(args.precision),
        quiet: args.quiet,
    };

    let mut m1 = Mat22::new(2., -1., 1., 2.);
    out.show("m1", &m1);

    let m1_inv = m1.inverse()?;
    out.show("m1.inverse()", &m1_inv);
    ensure!(m1_inv * m1 == Mat22::identity(), "m1.inverse() * m1 is not the identity");
    ensure!(m1 * m1_inv == Mat22::identity(), "m1 * m1.inverse() is not the identity");

    out.line(format!("det(m1) = {}", m1.determinant()));
    out.line(format!("trace(m1) = {}\n", m1.trace()));

    for selector in 1..=2 {
        let root = m1.eigen(selector)?;
        out.line(root.display_root_with(selector as usize, out.config).to_string());
    }
    out.line("");

    let m2 = 1. + m1;
    ensure!(m2 == Mat22::new(3., 0., 2., 3.));
    out.show("m2", &m2);

    let m3 = m2 - 1.;
    ensure!(m3 == m1);

    let m4 = 1. - m3;
    ensure!(m4 == Mat22::new(-1., 2., 0., -1.));
    out.show("m4", &m4);

    let m5 = m4 * 5.;
    let m6 = 10. * m5;
    out.show("m6", &m6);
    ensure!((m6 / 10.)? == m5);
    ensure!((10. / m6)? == 10. * m6.inverse()?);

    let m7 = m1.post_increment();
    out.show("m1", &m1);
    out.show("m7", &m7);

    let mut m8 = *m1.decrement();
    m8.post_decrement();
    out.show("m8", &m8);
    ensure!(m1 == 1. + m8);
    ensure!(-m1 + 1. == -m8);
    out.line(format!("m8 is {}symmetric", if m8.is_symmetric() { "" } else { "not " }));

    let mut m9 = Mat22::new(123., 6., 6., 4567.89);
    out.show("m9", &m9);
    out.line(format!("m9 is {}symmetric", if m9.is_symmetric() { "" } else { "not " }));

    for (i, v) in [3., 1., 7., 4.].into_iter().enumerate() {
        *m9.at_mut(i as isize)? = v;
    }
    out.show("m9", &m9);
    out.line(format!("det(m9) = {:.*}", out.config.precision, m9.eigenvalues()));
    out.line(format!("m9 is {}similar to m1", if m9.is_similar(&m1) { "" } else { "not " }));

    let m11 = (0.5 * m9).transpose();
    out.show("m11", &m11);
    ensure!(m11.transpose() == 0.5 * m9);
    ensure!(m11.pos() == -(-m11));

    if args.interactive {
        println!("In response to the following prompt");
        println!("enter the numbers 10, 20, 30, 40 in that order\n");
        let m12 = Mat22::prompt(&mut io::stdin().lock(), &mut io::stdout())?;
        out.show("m12", &m12);
        ensure!(m12 == Mat22::new(10., 20., 30., 40.), "expected (10, 20, 30, 40), got {:?}", m12);
    }

    println!("Test completed successfully!");
    Ok(())
}
