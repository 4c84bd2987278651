use crate::error::{MergeError, MergeResult};

/// How the two eyes are arranged on the merged canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation{
    /// Left and right, for portrait sources.
    SideBySide,
    /// Top and bottom, for landscape and square sources.
    OverUnder,
}

impl Orientation{
    /// Only the first image decides; the second one just gets padded.
    pub fn for_primary(width: u32, height: u32) -> Self{
        if height > width {
            Self::SideBySide
        } else {
            Self::OverUnder
        }
    }

    /// Filename tag most 3D viewers use to pick the viewing mode.
    pub fn tag(self) -> &'static str{
        match self{
            Self::SideBySide => "3DHF",
            Self::OverUnder => "3DVF",
        }
    }

    pub fn describe(self) -> &'static str{
        match self{
            Self::SideBySide => "Horizontally",
            Self::OverUnder => "Vertically",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout{
    pub orientation: Orientation,
    pub width: u32,
    pub height: u32,
    /// Where the second image lands; the first is always at the origin.
    pub second_at: (u32, u32),
}

impl Layout{
    pub fn plan(first: (u32, u32), second: (u32, u32)) -> MergeResult<Self>{
        let (w1, h1) = first;
        let (w2, h2) = second;
        let orientation = Orientation::for_primary(w1, h1);

        let (width, height, second_at) = match orientation{
            Orientation::SideBySide => (w1.checked_add(w2), Some(h1.max(h2)), (w1, 0)),
            Orientation::OverUnder => (Some(w1.max(w2)), h1.checked_add(h2), (0, h1)),
        };

        match (width, height){
            (Some(width), Some(height)) if rgba_fits(width, height) => {
                Ok(Self{ orientation, width, height, second_at })
            },
            _ => {
                let (width, height) = match orientation{
                    Orientation::SideBySide => (w1 as u64 + w2 as u64, h1.max(h2) as u64),
                    Orientation::OverUnder => (w1.max(w2) as u64, h1 as u64 + h2 as u64),
                };
                Err(MergeError::CanvasTooLarge{ width, height })
            },
        }
    }
}

/// The canvas is one RGBA8 buffer, its byte length has to be addressable.
fn rgba_fits(width: u32, height: u32) -> bool{
    (width as u64)
        .checked_mul(height as u64)
        .and_then(|px| px.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .is_some()
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_orientation(){
        assert_eq!(Orientation::for_primary(1080, 1920), Orientation::SideBySide);
        assert_eq!(Orientation::for_primary(1920, 1080), Orientation::OverUnder);
        assert_eq!(Orientation::for_primary(512, 512), Orientation::OverUnder);
        assert_eq!(Orientation::for_primary(100, 101), Orientation::SideBySide);
    }

    #[test]
    fn test_tags(){
        assert_eq!(Orientation::SideBySide.tag(), "3DHF");
        assert_eq!(Orientation::OverUnder.tag(), "3DVF");
    }

    #[test]
    fn test_plan_portrait(){
        let l = Layout::plan((100, 200), (120, 180)).unwrap();
        assert_eq!(l.orientation, Orientation::SideBySide);
        assert_eq!((l.width, l.height), (220, 200));
        assert_eq!(l.second_at, (100, 0));

        let l = Layout::plan((100, 200), (80, 260)).unwrap();
        assert_eq!((l.width, l.height), (180, 260));
    }

    #[test]
    fn test_plan_landscape(){
        let l = Layout::plan((300, 100), (250, 120)).unwrap();
        assert_eq!(l.orientation, Orientation::OverUnder);
        assert_eq!((l.width, l.height), (300, 220));
        assert_eq!(l.second_at, (0, 100));

        let l = Layout::plan((300, 100), (400, 40)).unwrap();
        assert_eq!((l.width, l.height), (400, 140));
    }

    #[test]
    fn test_plan_ignores_second_aspect(){
        // a portrait second image does not flip a landscape first one
        let l = Layout::plan((50, 10), (10, 50)).unwrap();
        assert_eq!(l.orientation, Orientation::OverUnder);
        assert_eq!((l.width, l.height), (50, 60));
    }

    #[test]
    fn test_plan_overflow(){
        let res = Layout::plan((1, u32::MAX), (1, 1));
        assert!(res.is_ok());

        let res = Layout::plan((u32::MAX - 1, u32::MAX), (2, 1));
        assert!(matches!(
            res,
            Err(MergeError::CanvasTooLarge{ width, .. }) if width == u32::MAX as u64 + 1
        ));

        let res = Layout::plan((u32::MAX, 5), (1, u32::MAX));
        assert!(matches!(res, Err(MergeError::CanvasTooLarge{ .. })));

        let res = Layout::plan((u32::MAX, u32::MAX / 2), (1, u32::MAX / 2));
        assert!(matches!(res, Err(MergeError::CanvasTooLarge{ .. })));
    }
}
