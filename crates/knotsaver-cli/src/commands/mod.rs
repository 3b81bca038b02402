pub mod config;
pub mod knot;
pub mod run;
pub mod simulate;

use knotsaver_core::Vec2d;

/// Parse a control point written as `X,Y`
pub fn parse_point(s: &str) -> Result<Vec2d, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;
    Ok(Vec2d::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2"), Ok(Vec2d::new(1.0, 2.0)));
        assert_eq!(parse_point(" 4.5 , -3 "), Ok(Vec2d::new(4.5, -3.0)));
        assert_eq!(parse_point("-1,-2"), Ok(Vec2d::new(-1.0, -2.0)));
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,b").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
