use super::map_state::ImageMap;
use crate::draw::{AreaDrawContext, ContainerDrawContext, DrawHandler, Surface};

impl ImageMap {
    /// Draw one frame
    ///
    /// The image is drawn by the surface, or by `handler.draw_map` when the
    /// map is owner drawn. Owner-drawn areas are then drawn in storage order,
    /// and the focus outline goes around the focused area unless the
    /// relevant callback took over focus drawing. The outline is drawn last,
    /// after every callback has returned.
    pub fn render<S, H>(&mut self, surface: &mut S, handler: &mut H) -> Result<(), H::Error>
    where
        S: Surface + ?Sized,
        H: DrawHandler<S>,
    {
        self.sync();
        let offset = self.image_offset();

        let frame_focus = if self.owner_draw {
            let mut ctx = ContainerDrawContext::new(surface, self.container_draw_state(), offset);
            if let Err(err) = handler.draw_map(&mut ctx) {
                log::error!("Owner draw of the map failed");
                return Err(err);
            }
            ctx.draw_focus()
        } else {
            let filter = (!self.enabled).then_some(&self.disabled_filter);
            surface.draw_image(offset, self.bounds(), filter);
            true
        };

        let focused = self.focused_area().filter(|_| self.has_focus);
        let mut outline = None;
        for (index, area) in self.areas.iter().enumerate() {
            let is_focused = focused == Some(index);
            if area.owner_draw() {
                let mut ctx = AreaDrawContext::new(surface, index, self.draw_state(index), offset);
                if let Err(err) = handler.draw_area(area, &mut ctx) {
                    log::error!("Owner draw of area {} failed", index);
                    return Err(err);
                }
                if is_focused && ctx.draw_focus() {
                    outline = Some(area.shape());
                }
            } else if is_focused && frame_focus {
                outline = Some(area.shape());
            }
        }

        if let Some(shape) = outline {
            surface.draw_focus_outline(shape, offset);
        }
        Ok(())
    }
}
