pub mod consensus {
    //!
    //! A module for constants which directly impact consensus.
    //!

    use likr_math::Uint256;

    /// Base units in one coin
    pub const COIN: u64 = 100_000_000;

    //
    // ~~~~~~~~~~~~~~~~~~~~~~~~~ Proof of work limits ~~~~~~~~~~~~~~~~~~~~~~~~~
    //

    /// Mainnet difficulty ceiling, `~0 >> 20`
    pub const MAINNET_POW_LIMIT: Uint256 = Uint256::MAX.const_shr(20);

    /// Looser mainnet ceiling applied before launch, `~0 >> 24`
    pub const MAINNET_START_WORK: Uint256 = Uint256::MAX.const_shr(24);

    /// Test network ceiling, `~0 >> 1`
    pub const TESTNET_POW_LIMIT: Uint256 = Uint256::MAX.const_shr(1);

    //
    // ~~~~~~~~~~~~~~~~~~~~~~~~~ Genesis ~~~~~~~~~~~~~~~~~~~~~~~~~
    //

    /// The value pushed first in every genesis coinbase signature script (`0x1d00ffff`)
    pub const GENESIS_COINBASE_BITS_PUSH: i64 = 486604799;

    /// The script number pushed after [`GENESIS_COINBASE_BITS_PUSH`]
    pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;
}

pub mod seeds {
    /// Seed "last seen" times are pushed back by one week plus a random share of another week
    pub const ONE_WEEK_SECONDS: u64 = 7 * 24 * 60 * 60;
}

pub mod checkpoints {
    /// Cost of verifying a transaction after the last checkpoint relative to one before it
    pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}
