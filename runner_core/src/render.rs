//! Pure read of the simulation into draw commands. No gameplay logic lives
//! here; any renderer (Canvas2D, test harness) just walks the list in order.

use crate::aabb::Aabb;
use crate::{Character, Cloud, Config, Obstacle, ObstacleKind, RunState};
use hecs::World;

/// Screen-space rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<Aabb> for RectPx {
    fn from(aabb: Aabb) -> Self {
        Self {
            x: aabb.min.x,
            y: aabb.min.y,
            w: aabb.width(),
            h: aabb.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Ground { y: f32 },
    Cloud { x: f32, y: f32, w: f32 },
    Character { rect: RectPx },
    SignPost { rect: RectPx },
    SignBoard { rect: RectPx },
    Score { value: u32 },
}

/// Build the frame's draw list in back-to-front order
pub fn render_model(world: &World, run: &RunState, config: &Config) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    cmds.push(DrawCmd::Ground { y: config.ground_y });

    for (_e, cl) in world.query::<&Cloud>().iter() {
        cmds.push(DrawCmd::Cloud {
            x: cl.x,
            y: cl.y,
            w: cl.w,
        });
    }

    for (_e, c) in world.query::<&Character>().iter() {
        cmds.push(DrawCmd::Character { rect: c.aabb().into() });
    }

    for (_e, o) in world.query::<&Obstacle>().iter() {
        match o.kind {
            ObstacleKind::Sign { .. } => {
                cmds.push(DrawCmd::SignPost {
                    rect: o.post_rect(config.ground_y).into(),
                });
                cmds.push(DrawCmd::SignBoard {
                    rect: o.board_rect(config.ground_y).into(),
                });
            }
        }
    }

    cmds.push(DrawCmd::Score {
        value: run.display_score(),
    });

    cmds
}
