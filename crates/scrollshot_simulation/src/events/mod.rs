//! Game events - уведомления для presentation/audio/score слоя
//!
//! Доставка синхронная: `emit` вызывает всех подходящих listeners
//! в порядке регистрации до того как тик продолжится.
//! Таблица listeners живёт в `EventBus` (Resource сессии) и очищается при её завершении.

use bevy::prelude::*;
use crate::logger;

/// Типизированное событие симуляции
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Игрок получил урон (новое значение health)
    PlayerDamaged { health: u32 },
    /// Игрок умер (terminal, ровно один раз за сессию)
    PlayerDied,
    /// Враг убит (последняя позиция центра врага)
    EnemyKilled { position: Vec2 },
    BulletFired,
}

/// Дискриминант события - ключ подписки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PlayerDamaged,
    PlayerDied,
    EnemyKilled,
    BulletFired,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayerDamaged { .. } => EventKind::PlayerDamaged,
            GameEvent::PlayerDied => EventKind::PlayerDied,
            GameEvent::EnemyKilled { .. } => EventKind::EnemyKilled,
            GameEvent::BulletFired => EventKind::BulletFired,
        }
    }
}

/// Приёмник событий
///
/// Системы пишут в `EventBus`, чистые helpers - в любой sink (в тестах `Vec<GameEvent>`).
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Handle для отписки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameEvent) + Send + Sync>;

struct ListenerEntry {
    id: ListenerId,
    /// None = все события
    filter: Option<EventKind>,
    callback: Listener,
}

/// Таблица listeners (Resource)
#[derive(Resource, Default)]
pub struct EventBus {
    listeners: Vec<ListenerEntry>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Подписка на один вид события
    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + Send + Sync + 'static,
    {
        self.register(Some(kind), Box::new(listener))
    }

    /// Подписка на все события
    pub fn subscribe_all<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + Send + Sync + 'static,
    {
        self.register(None, Box::new(listener))
    }

    fn register(&mut self, filter: Option<EventKind>, callback: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(ListenerEntry { id, filter, callback });

        logger::log(&format!("EventBus: listener {:?} registered (filter: {:?})", id, filter));
        id
    }

    /// Возвращает false если такого listener нет (уже снят)
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|entry| entry.id != id);
        let removed = self.listeners.len() != before;

        if removed {
            logger::log(&format!("EventBus: listener {:?} removed", id));
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.listeners.is_empty() {
            logger::log(&format!("EventBus: clearing {} listeners", self.listeners.len()));
        }
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit(&mut self, event: &GameEvent) {
        let kind = event.kind();

        for entry in self.listeners.iter_mut() {
            if entry.filter.map_or(true, |filter| filter == kind) {
                (entry.callback)(event);
            }
        }
    }
}

impl EventSink for EventBus {
    fn notify(&mut self, event: GameEvent) {
        self.emit(&event);
    }
}
