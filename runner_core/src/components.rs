use crate::aabb::Aabb;
use crate::config::Config;
use crate::params::Params;
use glam::Vec2;

/// The player character. X stays fixed; only the vertical axis simulates.
#[derive(Debug, Clone, Copy)]
pub struct Character {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub ducking: bool,
}

impl Character {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.character_x,
            y: config.ground_y - config.character_h,
            w: config.character_w,
            h: config.character_h,
            vy: 0.0,
            on_ground: true,
            ducking: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), Vec2::new(self.w, self.h))
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Leading (left) edge. An obstacle only counts as passed once its
    /// trailing edge clears this, so an obstacle still overlapping the
    /// character never awards the bonus.
    pub fn leading_edge(&self) -> f32 {
        self.x
    }
}

/// Obstacle payloads, discriminated by kind so future shapes slot in without
/// touching collision or draw dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// A signboard: vertical post with a horizontal board on top. The post is
    /// fixed-width and horizontally centered under the board.
    Sign {
        post_h: f32,
        board_w: f32,
        board_h: f32,
    },
}

/// A scrolling obstacle. `passed` flips exactly once when the trailing edge
/// clears the character, awarding the pass bonus.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub kind: ObstacleKind,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, kind: ObstacleKind) -> Self {
        Self {
            x,
            kind,
            passed: false,
        }
    }

    pub fn width(&self) -> f32 {
        match self.kind {
            ObstacleKind::Sign { board_w, .. } => board_w,
        }
    }

    pub fn height(&self) -> f32 {
        match self.kind {
            ObstacleKind::Sign { post_h, board_h, .. } => post_h + board_h,
        }
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width()
    }

    /// Post sub-rectangle of a sign, standing on the ground
    pub fn post_rect(&self, ground_y: f32) -> Aabb {
        match self.kind {
            ObstacleKind::Sign { post_h, board_w, .. } => Aabb::from_pos_size(
                Vec2::new(self.x + (board_w - Params::SIGN_POST_W) / 2.0, ground_y - post_h),
                Vec2::new(Params::SIGN_POST_W, post_h),
            ),
        }
    }

    /// Board sub-rectangle of a sign, sitting on top of the post
    pub fn board_rect(&self, ground_y: f32) -> Aabb {
        match self.kind {
            ObstacleKind::Sign {
                post_h,
                board_w,
                board_h,
            } => Aabb::from_pos_size(
                Vec2::new(self.x, ground_y - post_h - board_h),
                Vec2::new(board_w, board_h),
            ),
        }
    }

    /// Composite collision test: a sign is the union of its post and board,
    /// not a single bounding box (the post is narrower than the board).
    pub fn collides(&self, rect: &Aabb, ground_y: f32) -> bool {
        match self.kind {
            ObstacleKind::Sign { .. } => {
                rect.overlaps(&self.post_rect(ground_y)) || rect.overlaps(&self.board_rect(ground_y))
            }
        }
    }
}

/// Decorative cloud; no gameplay behaviour
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub w: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_at(x: f32) -> Obstacle {
        Obstacle::new(
            x,
            ObstacleKind::Sign {
                post_h: 30.0,
                board_w: 50.0,
                board_h: 24.0,
            },
        )
    }

    #[test]
    fn test_sign_dimensions() {
        let o = sign_at(100.0);
        assert_eq!(o.width(), 50.0, "Sign width is the board width");
        assert_eq!(o.height(), 54.0, "Sign height is post plus board");
        assert_eq!(o.trailing_edge(), 150.0);
    }

    #[test]
    fn test_sign_post_centered_under_board() {
        let ground_y = 242.0;
        let o = sign_at(100.0);
        let post = o.post_rect(ground_y);
        let board = o.board_rect(ground_y);
        assert_eq!(post.width(), Params::SIGN_POST_W);
        let post_center = (post.min.x + post.max.x) / 2.0;
        let board_center = (board.min.x + board.max.x) / 2.0;
        assert!((post_center - board_center).abs() < 1e-4);
        assert_eq!(post.max.y, ground_y, "Post stands on the ground");
        assert_eq!(board.max.y, post.min.y, "Board sits directly on the post");
    }

    #[test]
    fn test_character_starts_on_ground() {
        let config = Config::new();
        let c = Character::new(&config);
        assert!(c.on_ground);
        assert_eq!(c.bottom(), config.ground_y);
        assert_eq!(c.vy, 0.0);
    }
}
