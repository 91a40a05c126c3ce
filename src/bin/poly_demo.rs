#![allow(non_snake_case)]

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use poly_ring::primitive_int::StaticRing;
use poly_ring::ring::*;
use poly_ring::rings::bigint::BigIntRing;
use poly_ring::rings::float_real::Real64;
use poly_ring::rings::poly::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Sum,
    Product
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BaseRing {
    Int,
    Bigint,
    Float
}

/// Adds or multiplies two polynomials, given by their coefficient lists.
#[derive(Parser)]
struct Cli {
    /// Coefficients of the left operand, lowest degree first
    #[arg(long, default_value = "[1, 2, 3]")]
    lhs: String,
    /// Coefficients of the right operand, lowest degree first
    #[arg(long, default_value = "[4, 5, 6]")]
    rhs: String,
    #[arg(short, long, default_value = "product")]
    operation: Operation,
    /// Ring the coefficients live in
    #[arg(short, long, default_value = "int")]
    ring: BaseRing
}

///
/// Parses both operands as polynomials over `base_ring`, adds or multiplies them
/// and returns the result, once as coefficient list and once in terms of `X`.
///
fn compute<R>(base_ring: R, cli: &Cli) -> anyhow::Result<(String, String)>
    where R: Ring,
        R::Element: FromStr + Display,
        <R::Element as FromStr>::Err: Display
{
    let P = PolynomialRing::instance(base_ring);
    let lhs: Polynomial<R::Element> = cli.lhs.parse().with_context(|| format!("cannot parse left operand {:?}", cli.lhs))?;
    let rhs: Polynomial<R::Element> = cli.rhs.parse().with_context(|| format!("cannot parse right operand {:?}", cli.rhs))?;
    debug!(lhs = %lhs, rhs = %rhs, "parsed operands");

    let result = match cli.operation {
        Operation::Sum => P.sum(&lhs, &rhs),
        Operation::Product => P.product(&lhs, &rhs)
    };
    info!(len = result.len(), "computed {:?}", cli.operation);
    return Ok((format!("{}", result), format!("{}", P.format(&result))));
}

fn run(cli: &Cli) -> anyhow::Result<(String, String)> {
    match cli.ring {
        BaseRing::Int => compute(StaticRing::<i64>::RING, cli),
        BaseRing::Bigint => compute(BigIntRing::RING, cli),
        BaseRing::Float => compute(Real64::RING, cli)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let (coefficients, formatted) = run(&cli)?;
    println!("{}", coefficients);
    println!("{}", formatted);
    return Ok(());
}

#[test]
fn test_default_product() {
    let cli = Cli::parse_from(["poly-demo"]);
    let (coefficients, formatted) = run(&cli).unwrap();
    assert_eq!("[4, 13, 28, 27, 18]", coefficients);
    assert_eq!("4 + 13X + 28X^2 + 27X^3 + 18X^4", formatted);
}

#[test]
fn test_sum() {
    let cli = Cli::parse_from(["poly-demo", "--operation", "sum", "--lhs", "[1, 2, 3, 4, 5]"]);
    let (coefficients, formatted) = run(&cli).unwrap();
    assert_eq!("[5, 7, 9, 4, 5]", coefficients);
    assert_eq!("5 + 7X + 9X^2 + 4X^3 + 5X^4", formatted);
}

#[test]
fn test_bigint_ring() {
    let cli = Cli::parse_from(["poly-demo", "--ring", "bigint", "--lhs", "[18446744073709551616, 1]", "--rhs", "[18446744073709551616]"]);
    let (coefficients, _) = run(&cli).unwrap();
    assert_eq!("[340282366920938463463374607431768211456, 18446744073709551616]", coefficients);
}

#[test]
fn test_float_ring() {
    let cli = Cli::parse_from(["poly-demo", "-r", "float", "--lhs", "[0.5, 1.5]", "--rhs", "[2]"]);
    let (coefficients, formatted) = run(&cli).unwrap();
    assert_eq!("[1, 3]", coefficients);
    assert_eq!("1 + 3X", formatted);
}

#[test]
fn test_blank_operand() {
    let cli = Cli {
        lhs: "  ".to_owned(),
        rhs: "[1]".to_owned(),
        operation: Operation::Product,
        ring: BaseRing::Int
    };
    let err = run(&cli).unwrap_err();
    assert_eq!(Some(&PolynomialError::MissingCoefficients), err.downcast_ref::<PolynomialError>());
}

#[test]
fn test_invalid_coefficient() {
    let cli = Cli::parse_from(["poly-demo", "--rhs", "[1, 2.5]"]);
    let err = run(&cli).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PolynomialError>(),
        Some(PolynomialError::InvalidCoefficient { position: 1, .. })
    ));
}
