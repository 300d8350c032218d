pub(crate) use self::layout::GameLayout;

mod layout;
pub(crate) mod widgets;
