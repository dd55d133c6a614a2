//! Caliper v1 action vocabulary.

caliper_symbols! {
    /// Caliper action performed by an actor.
    Action {
        Abandoned => "http://purl.imsglobal.org/vocab/caliper/v1/action#Abandoned",
        Activated => "http://purl.imsglobal.org/vocab/caliper/v1/action#Activated",
        Attached => "http://purl.imsglobal.org/vocab/caliper/v1/action#Attached",
        Bookmarked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Bookmarked",
        ChangedResolution => "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedResolution",
        ChangedSize => "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedSize",
        ChangedVolume => "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedVolume",
        Classified => "http://purl.imsglobal.org/vocab/caliper/v1/action#Classified",
        ClosedPopout => "http://purl.imsglobal.org/vocab/caliper/v1/action#ClosedPopout",
        Commented => "http://purl.imsglobal.org/vocab/caliper/v1/action#Commented",
        Completed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Completed",
        Deactivated => "http://purl.imsglobal.org/vocab/caliper/v1/action#Deactivated",
        Described => "http://purl.imsglobal.org/vocab/caliper/v1/action#Described",
        Disliked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Disliked",
        DisabledClosedCaptioning => "http://purl.imsglobal.org/vocab/caliper/v1/action#DisabledClosedCaptioning",
        EnabledClosedCaptioning => "http://purl.imsglobal.org/vocab/caliper/v1/action#EnabledClosedCaptioning",
        Ended => "http://purl.imsglobal.org/vocab/caliper/v1/action#Ended",
        EnteredFullscreen => "http://purl.imsglobal.org/vocab/caliper/v1/action#EnteredFullScreen",
        ExitedFullscreen => "http://purl.imsglobal.org/vocab/caliper/v1/action#ExitedFullScreen",
        ForwardedTo => "http://purl.imsglobal.org/vocab/caliper/v1/action#ForwardedTo",
        Graded => "http://purl.imsglobal.org/vocab/caliper/v1/action#Graded",
        Hid => "http://purl.imsglobal.org/vocab/caliper/v1/action#Hid",
        Highlighted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Highlighted",
        JumpedTo => "http://purl.imsglobal.org/vocab/caliper/v1/action#JumpedTo",
        Identified => "http://purl.imsglobal.org/vocab/caliper/v1/action#Identified",
        Liked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Liked",
        Linked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Linked",
        LoggedIn => "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedIn",
        LoggedOut => "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedOut",
        Muted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Muted",
        NavigatedTo => "http://purl.imsglobal.org/vocab/caliper/v1/action#NavigatedTo",
        OpenedPopout => "http://purl.imsglobal.org/vocab/caliper/v1/action#OpenedPopout",
        Paused => "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused",
        Ranked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Ranked",
        Questioned => "http://purl.imsglobal.org/vocab/caliper/v1/action#Questioned",
        Recommended => "http://purl.imsglobal.org/vocab/caliper/v1/action#Recommended",
        Replied => "http://purl.imsglobal.org/vocab/caliper/v1/action#Replied",
        Restarted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Restarted",
        Resumed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Resumed",
        Reviewed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Reviewed",
        Rewound => "http://purl.imsglobal.org/vocab/caliper/v1/action#Rewound",
        Searched => "http://purl.imsglobal.org/vocab/caliper/v1/action#Searched",
        Shared => "http://purl.imsglobal.org/vocab/caliper/v1/action#Shared",
        Showed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Showed",
        Skipped => "http://purl.imsglobal.org/vocab/caliper/v1/action#Skipped",
        Started => "http://purl.imsglobal.org/vocab/caliper/v1/action#Started",
        Submitted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Submitted",
        Subscribed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Subscribed",
        Tagged => "http://purl.imsglobal.org/vocab/caliper/v1/action#Tagged",
        TimedOut => "http://purl.imsglobal.org/vocab/caliper/v1/action#TimedOut",
        Viewed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Viewed",
        Unmuted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Unmuted",
    }
}
