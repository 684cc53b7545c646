/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::drag::Notice;

/// Side effects the builder asks its host for. Both calls are
/// fire-and-forget and always succeed from the builder's point of view.
pub trait Effects {
    fn notify(&self, title: &str, description: &str);

    fn copy_to_clipboard(&self, text: &str);

    fn show(&self, notice: &Notice) {
        self.notify(&notice.title, &notice.description);
    }
}
