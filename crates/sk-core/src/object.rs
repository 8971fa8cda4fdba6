/// The capability set every spawnable game object implements.
///
/// All four operations are side-effecting and infallible. Default
/// bodies are no-ops so simple kinds only override what they use.
/// The game loop calls [`update`](GameObject::update) then
/// [`render`](GameObject::render) on each object once per tick; the
/// other two are available to game code outside the loop.
///
/// New kinds are introduced by implementing this trait and registering
/// a spawner with [`SpawnRegistry`](crate::SpawnRegistry) — nothing
/// that creates or ticks objects needs to change.
pub trait GameObject {
    /// Short lowercase name of the concrete kind (e.g. `"plane"`).
    fn kind(&self) -> &str;

    /// Play the object's idle animation.
    fn play_default_animation(&mut self) {}

    /// Move the object within the game world.
    fn move_in_game(&mut self) {}

    /// Advance the object's state by one tick.
    fn update(&mut self) {}

    /// Draw the object.
    fn render(&mut self) {}
}
