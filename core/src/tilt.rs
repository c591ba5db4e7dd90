use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltCoefficients {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lift_px: f64,
}

impl Default for TiltCoefficients {
    fn default() -> Self {
        Self {
            rotate_x: -8.0,
            rotate_y: 10.0,
            lift_px: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub mx_pct: f64,
    pub my_pct: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Rotation grows linearly with the pointer's distance from the card center;
/// a pointer outside the bounds is not clamped.
pub fn tilt_at(
    bounds: CardBounds,
    client_x: f64,
    client_y: f64,
    coefficients: TiltCoefficients,
) -> Option<Tilt> {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return None;
    }
    let fx = (client_x - bounds.left) / bounds.width;
    let fy = (client_y - bounds.top) / bounds.height;
    Some(Tilt {
        mx_pct: fx * 100.0,
        my_pct: fy * 100.0,
        rotate_x_deg: (fy - 0.5) * coefficients.rotate_x,
        rotate_y_deg: (fx - 0.5) * coefficients.rotate_y,
    })
}

impl Tilt {
    pub fn mx(&self) -> String {
        format!("{}%", self.mx_pct)
    }

    pub fn my(&self) -> String {
        format!("{}%", self.my_pct)
    }

    pub fn transform(&self, lift_px: f64) -> String {
        format!(
            "translateY(-{lift_px}px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardBounds = CardBounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn center_has_no_rotation() {
        let tilt = tilt_at(CARD, 200.0, 100.0, TiltCoefficients::default()).unwrap();
        assert_eq!(tilt.mx(), "50%");
        assert_eq!(tilt.my(), "50%");
        assert_eq!(tilt.rotate_x_deg, 0.0);
        assert_eq!(tilt.rotate_y_deg, 0.0);
    }

    #[test]
    fn corner_rotates_on_both_axes() {
        let tilt = tilt_at(CARD, 100.0, 50.0, TiltCoefficients::default()).unwrap();
        assert_eq!(tilt.rotate_x_deg, 4.0);
        assert_eq!(tilt.rotate_y_deg, -5.0);
        assert_eq!(tilt.transform(4.0), "translateY(-4px) rotateX(4deg) rotateY(-5deg)");
    }

    #[test]
    fn zero_sized_card_is_skipped() {
        let flat = CardBounds { height: 0.0, ..CARD };
        assert!(tilt_at(flat, 0.0, 0.0, TiltCoefficients::default()).is_none());
    }
}
