//! # Distance Table
//!
//! This example builds a flat ΛCDM cosmology on the analytic FLRW solver and
//! prints distances, volumes, and cosmic times over a grid of redshifts.
//!
//! Parameters may be given as a JSON file; missing fields keep their
//! defaults:
//!
//! ```json
//! { "h0": 70.0, "omega_m": 0.3, "omega_k": -0.01 }
//! ```
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example distances
//! RUST_LOG=cosmo_classy=trace cargo run --example distances -- params.json
//! ```

use std::{env, error::Error, fs};

use cosmo_api::{
    Background, Capabilities, DensityParameters, Distances, HubbleParameter,
    units::in_gigayears,
};
use cosmo_classy::{Cosmology, Flrw, FlrwParameters, Quadrature};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uom::si::thermodynamic_temperature::kelvin;

/// Redshifts to tabulate.
const REDSHIFTS: [f64; 8] = [0.0, 0.1, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0];

fn load_parameters() -> Result<FlrwParameters, Box<dyn Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            let params: FlrwParameters = serde_json::from_str(&json)?;
            info!(%path, "loaded parameters");
            Ok(params)
        }
        None => Ok(FlrwParameters::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let params = load_parameters()?;
    let solver = Flrw::new(params)?;
    let cosmo = Cosmology::with_line_of_sight(solver, Quadrature::new(1024)?)?;

    println!("H0        = {:.3} km/s/Mpc", cosmo.h0()?);
    println!("Omega_m0  = {:.4}", cosmo.omega_m0()?);
    println!("Omega_de0 = {:.4}", cosmo.omega_de0()?);
    println!("Omega_k0  = {:.4}", cosmo.omega_k0()?);
    println!("Tcmb0     = {:.4} K", cosmo.t_cmb0()?.get::<kelvin>());
    println!("t_H       = {:.3} Gyr", in_gigayears(cosmo.hubble_time()?));
    println!("curvature = {:?}", cosmo.curvature());
    println!("supports  = {} quantities", cosmo.supported().len());
    println!();

    let d_c = cosmo.comoving_distance(REDSHIFTS)?;
    let d_a = cosmo.angular_diameter_distance(REDSHIFTS)?;
    let d_l = cosmo.luminosity_distance(REDSHIFTS)?;
    let volume = cosmo.comoving_volume(REDSHIFTS)?;
    let age = cosmo.age(REDSHIFTS)?;
    let lookback = cosmo.lookback_time(REDSHIFTS)?;

    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>12} {:>8} {:>8}",
        "z", "d_C", "d_A", "d_L", "V_C", "age", "t_L"
    );
    for (i, z) in REDSHIFTS.iter().enumerate() {
        println!(
            "{z:>6.2} {:>10.2} {:>10.2} {:>10.2} {:>12.4e} {:>8.3} {:>8.3}",
            d_c[i],
            d_a[i],
            d_l[i],
            volume[i],
            in_gigayears(age[i]),
            in_gigayears(lookback[i]),
        );
    }

    match cosmo.omega_nu0() {
        Ok(value) => println!("\nOmega_nu0 = {value}"),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}
