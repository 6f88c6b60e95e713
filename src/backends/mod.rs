use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "cycle")] {
        pub(crate) mod cycle;
        pub(crate) use self::cycle as active;
        #[cfg(test)]
        pub(crate) mod walk;
    } else {
        pub(crate) mod walk;
        pub(crate) use self::walk as active;
        #[cfg(test)]
        pub(crate) mod cycle;
    }
}
