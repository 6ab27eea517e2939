pub mod pointer_listeners;
