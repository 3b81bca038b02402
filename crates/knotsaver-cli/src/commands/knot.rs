use anyhow::Result;

use knotsaver_core::geometry::smooth;
use knotsaver_core::Vec2d;

pub fn run(points: &[Vec2d], steps: usize, plain: bool) -> Result<()> {
    let curve = smooth(points, steps)?;

    if curve.is_empty() && plain {
        eprintln!("At least 3 control points are needed to form a knot.");
        return Ok(());
    }

    println!("{}", format_curve(&curve, plain)?);
    Ok(())
}

fn format_curve(curve: &[Vec2d], plain: bool) -> Result<String> {
    if plain {
        let lines: Vec<String> = curve
            .iter()
            .map(|p| format!("{:.3} {:.3}", p.x, p.y))
            .collect();
        Ok(lines.join("\n"))
    } else {
        Ok(serde_json::to_string_pretty(curve)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_curve_is_json_array() {
        let curve = smooth(&[Vec2d::new(1.0, 1.0)], 5).unwrap();
        assert_eq!(format_curve(&curve, false).unwrap(), "[]");
    }

    #[test]
    fn test_plain_lines() {
        let curve = [Vec2d::new(1.0, 2.5), Vec2d::new(-3.0, 0.125)];
        assert_eq!(
            format_curve(&curve, true).unwrap(),
            "1.000 2.500\n-3.000 0.125"
        );
    }
}
