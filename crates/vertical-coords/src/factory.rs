//! Builds a [`VerticalConverter`] from a CF [`VerticalTransformation`] tag,
//! materialising its named parameter fields through a [`Reader`].

use crate::converter::VerticalConverter;
use crate::variants::{
    AltitudeHeightConverter, AltitudeStandardConverter, GeopotentialToAltitudeConverter,
    HybridSigmaApConverter, HybridSigmaConverter, Identity4dConverter, IdentityConverter,
    LnPressureConverter, OceanSConverter, OceanSVariant, PressureIntegrationConverter, SigmaConverter,
};
use cf_common::{Axis, CoreResult, DimensionRange, Reader, VerticalTransformation};

/// Column shape a converter's backing fields are read against.
#[derive(Debug, Clone, Copy)]
pub struct ColumnShape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub nt: usize,
}

fn read_field(reader: &dyn Reader, name: &str, dims: &[usize], unit: &str) -> CoreResult<Vec<f64>> {
    let ranges: Vec<DimensionRange> = dims.iter().map(|&size| DimensionRange { start: 0, size }).collect();
    reader.read_slice(name, &ranges, unit).map(|f| f.values().to_vec()).map_err(|e| {
        tracing::error!(field = name, error = %e, "failed to materialise vertical-transform input field");
        e
    })
}

/// Build the converter named by `transform`, reading any fields it
/// references (surface pressure, topography, ...) at their full shape.
///
/// `z_axis` supplies native-level values for variants whose native axis
/// doubles as the un-converted coordinate (identity, ln-pressure, sigma,
/// altitude-standard).
pub fn build_converter(
    transform: &VerticalTransformation,
    reader: &dyn Reader,
    z_axis: &Axis,
    shape: ColumnShape,
) -> CoreResult<Box<dyn VerticalConverter + Send + Sync>> {
    let ColumnShape { nx, ny, nz, nt } = shape;

    match transform {
        VerticalTransformation::Identity => Ok(Box::new(IdentityConverter::new(z_axis.values().to_vec()))),

        VerticalTransformation::Identity4D => {
            let pressure = read_field(reader, z_axis.name(), &[nx, ny, nz, nt], "Pa")?;
            Ok(Box::new(Identity4dConverter::new(pressure, nx, ny, nz)))
        }

        VerticalTransformation::LnPressure { p0 } => {
            Ok(Box::new(LnPressureConverter::new(*p0, z_axis.values().to_vec())))
        }

        VerticalTransformation::AltitudeStandard => {
            Ok(Box::new(AltitudeStandardConverter::new(z_axis.values().to_vec())))
        }

        VerticalTransformation::Sigma { p_top, surface_pressure } => {
            let ps = read_field(reader, surface_pressure, &[nx, ny, nt], "Pa")?;
            Ok(Box::new(SigmaConverter::new(*p_top, z_axis.values().to_vec(), ps, nx, ny)))
        }

        VerticalTransformation::HybridSigma { a, b, p0, surface_pressure } => {
            let ps = read_field(reader, surface_pressure, &[nx, ny, nt], "Pa")?;
            Ok(Box::new(HybridSigmaConverter::new(a.clone(), b.clone(), *p0, ps, nx, ny)))
        }

        VerticalTransformation::HybridSigmaAp { ap, b, surface_pressure } => {
            let ps = read_field(reader, surface_pressure, &[nx, ny, nt], "Pa")?;
            Ok(Box::new(HybridSigmaApConverter::new(ap.clone(), b.clone(), ps, nx, ny)))
        }

        VerticalTransformation::PressureToStandardAltitude => {
            let inner = Box::new(IdentityConverter::new(z_axis.values().to_vec()));
            Ok(Box::new(crate::variants::PressureToStandardAltitudeConverter::new(inner)))
        }

        VerticalTransformation::PressureIntegration { surface_geopotential, specific_humidity } => {
            // The surface-pressure and air-temperature inputs aren't named
            // by the transform tag; resolved by CF standard_name, matching
            // how the original collaborator locates formula terms.
            let sap = read_field(reader, "surface_air_pressure", &[nx, ny, nt], "Pa")?;
            let sgp = read_field(reader, surface_geopotential, &[nx, ny, nt], "m2 s-2")?;
            let airt = read_field(reader, "air_temperature", &[nx, ny, nz, nt], "K")?;
            let sh = match specific_humidity {
                Some(name) => Some(read_field(reader, name, &[nx, ny, nz, nt], "kg kg-1")?),
                None => None,
            };
            let inner = Box::new(IdentityConverter::new(z_axis.values().to_vec()));
            Ok(Box::new(PressureIntegrationConverter::new(inner, sap, sgp, airt, sh, nx, ny, nz)))
        }

        VerticalTransformation::OceanSG1 { depth, depth_c, eta, s, c } => {
            let depth_vals = read_field(reader, depth, &[nx, ny], "m")?;
            let eta_vals = read_field(reader, eta, &[nx, ny, nt], "m")?;
            Ok(Box::new(OceanSConverter::new(
                OceanSVariant::G1,
                depth_vals,
                *depth_c,
                eta_vals,
                s.clone(),
                c.clone(),
                nx,
                ny,
                false,
            )))
        }

        VerticalTransformation::OceanSG2 { depth, depth_c, eta, s, c } => {
            let depth_vals = read_field(reader, depth, &[nx, ny], "m")?;
            let eta_vals = read_field(reader, eta, &[nx, ny, nt], "m")?;
            Ok(Box::new(OceanSConverter::new(
                OceanSVariant::G2,
                depth_vals,
                *depth_c,
                eta_vals,
                s.clone(),
                c.clone(),
                nx,
                ny,
                false,
            )))
        }

        VerticalTransformation::AltitudeHeight { topography, to_height } => {
            let topo = read_field(reader, topography, &[nx, ny, nt], "m")?;
            let inner = Box::new(IdentityConverter::new(z_axis.values().to_vec()));
            Ok(Box::new(AltitudeHeightConverter::new(inner, topo, nx, ny, *to_height)))
        }

        VerticalTransformation::GeopotentialToAltitude { topography } => {
            let geopotential = read_field(reader, topography, &[nx, ny, nz, nt], "m2 s-2")?;
            Ok(Box::new(GeopotentialToAltitudeConverter::new(geopotential, nx, ny, nz)))
        }
    }
}
