mod item;
mod vote;
mod win;
