//! Caliper v1 event categories.

caliper_symbols! {
    /// Caliper event `@type`.
    EventType {
        Annotation => "http://purl.imsglobal.org/caliper/v1/AnnotationEvent",
        Assessment => "http://purl.imsglobal.org/caliper/v1/AssessmentEvent",
        AssessmentItem => "http://purl.imsglobal.org/caliper/v1/AssessmentItemEvent",
        Assignable => "http://purl.imsglobal.org/caliper/v1/AssignableEvent",
        Event => "http://purl.imsglobal.org/caliper/v1/Event",
        Media => "http://purl.imsglobal.org/caliper/v1/MediaEvent",
        Navigation => "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
        Outcome => "http://purl.imsglobal.org/caliper/v1/OutcomeEvent",
        Reading => "http://purl.imsglobal.org/caliper/v1/ReadingEvent",
        Session => "http://purl.imsglobal.org/caliper/v1/SessionEvent",
        View => "http://purl.imsglobal.org/caliper/v1/ViewEvent",
    }
}
