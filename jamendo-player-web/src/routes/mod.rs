pub(crate) mod gradient;
pub(crate) mod pick;
pub(crate) mod player;
pub(crate) mod radio;
pub(crate) mod streaming;
