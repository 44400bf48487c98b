//! Transient notice center shared by the dashboard and the auth pages.

use std::time::Duration;

use leptos::*;
use system_ui::{TextTone, Toast, ToastRegion};

use crate::model::{Notice, NoticeTone};

/// Most notices visible at once; older ones are dropped first.
pub const NOTICE_LIMIT: usize = 3;
/// Delay before a notice dismisses itself.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notice with its queue-assigned id.
pub struct QueuedNotice {
    /// Queue-unique id.
    pub id: u64,
    /// Notice content.
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Bounded newest-first notice queue.
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<QueuedNotice>,
}

impl NoticeQueue {
    /// Adds a notice at the front and returns its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(0, QueuedNotice { id, notice });
        self.items.truncate(NOTICE_LIMIT);
        id
    }

    /// Removes the notice with `id`; returns whether it was still queued.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Visible notices, newest first.
    pub fn items(&self) -> &[QueuedNotice] {
        &self.items
    }
}

#[derive(Clone, Copy)]
/// Leptos handle for raising and dismissing notices.
pub struct NoticeCenter {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeCenter {
    /// Shows `notice` and schedules its dismissal.
    pub fn notify(&self, notice: Notice) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(notice));
        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|queue| queue.dismiss(id));
            },
            NOTICE_DISMISS_AFTER,
        );
    }

    /// Removes a notice before its timer fires.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

#[component]
/// Provides [`NoticeCenter`] to descendants and renders the notice stack after them.
pub fn NoticeProvider(children: Children) -> impl IntoView {
    let center = NoticeCenter {
        queue: create_rw_signal(NoticeQueue::default()),
    };
    provide_context(center);

    view! {
        {children()}
        <NoticeStack center />
    }
}

/// Returns the current [`NoticeCenter`].
///
/// # Panics
///
/// Panics if called outside [`NoticeProvider`].
pub fn use_notices() -> NoticeCenter {
    use_context::<NoticeCenter>().expect("NoticeCenter not provided")
}

fn toast_tone(tone: NoticeTone) -> TextTone {
    match tone {
        NoticeTone::Info => TextTone::Primary,
        NoticeTone::Destructive => TextTone::Danger,
    }
}

#[component]
fn NoticeStack(center: NoticeCenter) -> impl IntoView {
    let items = Signal::derive(move || center.queue.with(|queue| queue.items().to_vec()));
    view! {
        <ToastRegion layout_class="notice-stack">
            <For each=move || items.get() key=|item| item.id let:item>
                <Toast
                    title=item.notice.title.clone()
                    description=item.notice.description.clone()
                    tone=toast_tone(item.notice.tone)
                    on_dismiss=Callback::new(move |_| center.dismiss(item.id))
                />
            </For>
        </ToastRegion>
    }
}
