mod compose_scope;
mod statistics;
