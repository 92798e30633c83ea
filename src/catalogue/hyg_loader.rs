use std::io::Read;
use std::str::FromStr;

use csv::StringRecord;

use crate::catalogue::builder::{CatalogueLoader, StarCatalogueBuilder};
use crate::celestial::Star;
use crate::coordinates::EquatorialCoordinates;
use crate::nightsky_errors::NightSkyError;

// Column positions in the HYG database (v3) CSV
const HIP: usize = 1;
const PROPER: usize = 6;
const MAG: usize = 13;
const CI: usize = 16;
const RARAD: usize = 23;
const DECRAD: usize = 24;
const BAYER: usize = 27;
const CON: usize = 29;

/// Loader for the [HYG database](https://github.com/astronexus/HYG-Database) CSV format.
///
/// The first line is a header and is skipped. Stars reach the builder only once every row
/// has been parsed. For every following row:
///
/// | Field | Column | When blank |
/// |---|---|---|
/// | Hipparcos id | `hip` (1) | 0 |
/// | name | `proper` (6) | `"<bayer> <con>"`, or `"? <con>"` without Bayer designation |
/// | magnitude | `mag` (13) | 0 |
/// | color index | `ci` (16) | 0 |
/// | right ascension | `rarad` (23) | error |
/// | declination | `decrad` (24) | error |
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl CatalogueLoader for HygDatabaseLoader {
    fn load<R: Read>(
        &self,
        input: R,
        builder: &mut StarCatalogueBuilder,
    ) -> Result<(), NightSkyError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        let stars = reader
            .records()
            .map(|result| parse_star(&result?))
            .collect::<Result<Vec<_>, NightSkyError>>()?;

        log::debug!("HYG database: {} stars loaded", stars.len());
        for star in stars {
            builder.add_star(star);
        }
        Ok(())
    }
}

fn parse_star(record: &StringRecord) -> Result<Star, NightSkyError> {
    let hipparcos_id = parse_or_zero(record, HIP, "hip")?;
    let magnitude = parse_or_zero(record, MAG, "mag")?;
    let color_index = parse_or_zero(record, CI, "ci")?;
    let ra = parse_field(record, RARAD, "rarad")?;
    let dec = parse_field(record, DECRAD, "decrad")?;

    Star::new(
        hipparcos_id,
        star_name(record),
        EquatorialCoordinates::of(ra, dec)?,
        magnitude,
        color_index,
    )
}

fn star_name(record: &StringRecord) -> String {
    let field = |i| record.get(i).map(str::trim).unwrap_or_default();
    let constellation = field(CON);
    match (field(PROPER), field(BAYER)) {
        ("", "") => format!("? {constellation}"),
        ("", bayer) => format!("{bayer} {constellation}"),
        (proper, _) => proper.to_string(),
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

/// Parse a mandatory field.
fn parse_field<T: FromStr>(
    record: &StringRecord,
    index: usize,
    field: &'static str,
) -> Result<T, NightSkyError> {
    let value = record.get(index).unwrap_or_default().trim();
    value.parse().map_err(|_| NightSkyError::CatalogueParse {
        line: line_of(record),
        field,
        value: value.to_string(),
    })
}

/// Parse an optional field, blank meaning zero.
fn parse_or_zero<T: FromStr + Default>(
    record: &StringRecord,
    index: usize,
    field: &'static str,
) -> Result<T, NightSkyError> {
    match record.get(index).map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(_) => parse_field(record, index, field),
    }
}

#[cfg(test)]
mod hyg_loader_test {
    use super::*;
    use crate::celestial::Celestial;

    const HEADER: &str = "id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max";

    #[allow(clippy::too_many_arguments)]
    fn row(
        hip: &str,
        proper: &str,
        mag: &str,
        ci: &str,
        ra: &str,
        dec: &str,
        bayer: &str,
        con: &str,
    ) -> String {
        let mut fields = vec![""; 37];
        fields[0] = "1";
        fields[HIP] = hip;
        fields[PROPER] = proper;
        fields[MAG] = mag;
        fields[CI] = ci;
        fields[RARAD] = ra;
        fields[DECRAD] = dec;
        fields[BAYER] = bayer;
        fields[CON] = con;
        fields.join(",")
    }

    fn load(rows: &[String]) -> Result<StarCatalogueBuilder, NightSkyError> {
        let content = std::iter::once(HEADER.to_string())
            .chain(rows.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n");
        let mut builder = StarCatalogueBuilder::new();
        builder.load_from(content.as_bytes(), &HygDatabaseLoader)?;
        Ok(builder)
    }

    #[test]
    fn test_load() {
        let builder = load(&[
            row("24436", "Rigel", "0.18", "-0.03", "1.372430", "-0.143143", "Bet", "Ori"),
            row("25336", "", "1.64", "-0.224", "1.418651", "0.110823", "Gam", "Ori"),
            row("", "", "", "", "0.1", "0.2", "", "Ori"),
        ])
        .unwrap();

        let stars = builder.stars();
        assert_eq!(stars.len(), 3);
        assert_eq!(stars[0].name(), "Rigel");
        assert_eq!(stars[0].hipparcos_id(), 24436);
        assert_eq!(stars[0].magnitude(), 0.18);
        assert_eq!(stars[0].color_index(), -0.03);
        assert_eq!(stars[0].equatorial_pos().ra(), 1.372430);
        assert_eq!(stars[0].equatorial_pos().dec(), -0.143143);

        assert_eq!(stars[1].name(), "Gam Ori");
        assert_eq!(stars[2].name(), "? Ori");
        assert_eq!(stars[2].hipparcos_id(), 0);
        assert_eq!(stars[2].magnitude(), 0.0);
        assert_eq!(stars[2].color_index(), 0.0);
    }

    #[test]
    fn test_malformed_field() {
        let content = [
            HEADER.to_string(),
            row("24436", "Rigel", "0.18", "-0.03", "1.372430", "-0.143143", "Bet", "Ori"),
            row("25336", "Bellatrix", "1.64", "-0.224", "1.418651", "0.110823", "Gam", "Ori"),
            row("27989", "Betelgeuse", "bright", "1.5", "1.549729", "0.129276", "Alp", "Ori"),
        ]
        .join("\n");
        let mut builder = StarCatalogueBuilder::new();
        let err = builder
            .load_from(content.as_bytes(), &HygDatabaseLoader)
            .unwrap_err();

        // Nothing from the rows before the bad one is kept
        assert!(builder.stars().is_empty());
        assert!(builder.build().unwrap().stars().is_empty());
        assert_eq!(
            err,
            NightSkyError::CatalogueParse {
                line: 4,
                field: "mag",
                value: "bright".into()
            }
        );
    }

    #[test]
    fn test_missing_position() {
        let err = load(&[row("1", "x", "1", "0", "", "0.2", "", "Ori")]).unwrap_err();
        assert_eq!(
            err,
            NightSkyError::CatalogueParse {
                line: 2,
                field: "rarad",
                value: String::new()
            }
        );
    }

    #[test]
    fn test_negative_id_is_rejected() {
        let err = load(&[row("-4", "x", "1", "0", "0.1", "0.2", "", "Ori")]).unwrap_err();
        assert!(matches!(err, NightSkyError::CatalogueParse { field: "hip", .. }));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[row("1", "x", "1", "0", "7.0", "0.2", "", "Ori")]).unwrap_err(),
            NightSkyError::InvalidCoordinates { .. }
        ));
        assert_eq!(
            load(&[row("1", "x", "1", "6.0", "0.1", "0.2", "", "Ori")]).unwrap_err(),
            NightSkyError::InvalidColorIndex(6.0)
        );
    }
}
