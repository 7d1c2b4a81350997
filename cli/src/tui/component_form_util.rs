// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::{buffer::Buffer, crossterm::event::KeyEvent, layout::Rect};

use crate::tui::{
    component::{Component, Message},
    component_form::{FormItem, FormItemState},
    dispatcher::Dispatcher,
};

pub trait VisiblePredicate<S> {
    fn is_visible(store: &RefCell<S>) -> bool;
}

/// A form item that is only visible if the predicate function returns true.
///
/// A hidden item is skipped by the form navigation and takes no space.
pub struct VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    item: T,
    s: std::marker::PhantomData<S>,
    p: std::marker::PhantomData<P>,
}

impl<S, T, P> VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    pub fn new(item: T) -> Self {
        Self {
            item,
            s: std::marker::PhantomData,
            p: std::marker::PhantomData,
        }
    }
}

impl<S, T, P> Component<S> for VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.item.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.item.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.item.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.item.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.item.deactivate(dispatcher, store);
    }
}

impl<S, T, P> FormItem<S> for VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    fn item_title(&self, store: &RefCell<S>) -> &str {
        self.item.item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        match P::is_visible(store) {
            true => self.item.item_state(store),
            false => FormItemState::Invisible,
        }
    }
}
